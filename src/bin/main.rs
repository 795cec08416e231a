// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - HTTP client for the inventory REST backend
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use estoque_web::web_app::api::backend::{self, ClienteEstoque};
    use estoque_web::web_app::app::App as WebApp;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use tracing_subscriber;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize the global backend client for server functions
    let cliente = ClienteEstoque::do_ambiente();
    tracing::info!("Inventory backend at {}", cliente.base_url());
    backend::init_cliente(cliente);

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).expect("could not read configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="pt-BR">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
