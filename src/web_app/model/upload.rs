// web_app/model/upload.rs - Spreadsheet selection helpers

/// A CSV file accepted for upload.
///
/// The content is read as soon as the file is selected, so submitting
/// later needs no further browser APIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArquivoSelecionado {
    pub nome: String,
    pub tamanho: u64,
    pub conteudo: String,
}

/// Header row the upload endpoint expects: the backend reads rows by
/// these display column names, not by the JSON field names.
pub const CABECALHO_CSV: &str =
    "COD, NOME DO PRODUTO, MARCA, CEARÁ, SANTA CATARINA, SÃO PAULO, TOTAL, RESERVA";

/// The picker and the drop zone accept the same files: MIME `text/csv`
/// or a `.csv` name suffix. Anything else is rejected before upload.
pub fn arquivo_eh_csv(nome: &str, tipo: &str) -> bool {
    tipo == "text/csv" || nome.ends_with(".csv")
}

/// Human-readable file size shown next to the selected file.
pub fn formatar_tamanho(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNIDADES: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let expoente = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let expoente = expoente.min(UNIDADES.len() - 1);
    let valor = bytes as f64 / 1024_f64.powi(expoente as i32);

    let mut texto = format!("{valor:.2}");
    while texto.ends_with('0') {
        texto.pop();
    }
    if texto.ends_with('.') {
        texto.pop();
    }

    format!("{} {}", texto, UNIDADES[expoente])
}
