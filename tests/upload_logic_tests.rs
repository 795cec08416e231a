// tests/upload_logic_tests.rs - Upload panel behavior
//
// The panel accepts a file from the picker or the drop zone through
// the same predicate, shows the size in human units and requires a
// selection before submitting.

use estoque_web::web_app::erro::ErroValidacao;
use estoque_web::web_app::model::{
    arquivo_eh_csv, formatar_tamanho, ArquivoSelecionado, CABECALHO_CSV,
};

#[test]
fn test_aceita_csv_por_mime_ou_por_nome() {
    assert!(arquivo_eh_csv("estoque.csv", "text/csv"));
    assert!(arquivo_eh_csv("estoque.csv", "application/octet-stream"));
    assert!(arquivo_eh_csv("export", "text/csv"));
}

#[test]
fn test_recusa_planilhas_que_nao_sao_csv() {
    assert!(!arquivo_eh_csv(
        "estoque.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    ));
    assert!(!arquivo_eh_csv("estoque.txt", "text/plain"));
    // A comparação é sensível a maiúsculas, como no navegador.
    assert!(!arquivo_eh_csv("ESTOQUE.CSV", "TEXT/CSV"));
}

#[test]
fn test_mensagens_de_validacao_do_upload() {
    assert_eq!(
        ErroValidacao::ArquivoNaoCsv.to_string(),
        "Por favor, selecione apenas arquivos CSV"
    );
    assert_eq!(
        ErroValidacao::NenhumArquivo.to_string(),
        "Selecione um arquivo CSV"
    );
}

#[test]
fn test_tamanho_formatado_para_o_cartao() {
    assert_eq!(formatar_tamanho(0), "0 Bytes");
    assert_eq!(formatar_tamanho(812), "812 Bytes");
    assert_eq!(formatar_tamanho(1536), "1.5 KB");
    assert_eq!(formatar_tamanho(10 * 1024 * 1024), "10 MB");
}

#[test]
fn test_ajuda_anuncia_o_cabecalho_que_o_backend_le() {
    // O backend lê as colunas pelos nomes de exibição em maiúsculas,
    // não pelos nomes de campo do JSON.
    assert_eq!(
        CABECALHO_CSV,
        "COD, NOME DO PRODUTO, MARCA, CEARÁ, SANTA CATARINA, SÃO PAULO, TOTAL, RESERVA"
    );
    assert!(!CABECALHO_CSV.contains("nome_do_produto"));
}

#[test]
fn test_arquivo_selecionado_guarda_o_conteudo() {
    // O conteúdo é lido na seleção; o envio não volta ao navegador.
    let selecionado = ArquivoSelecionado {
        nome: "estoque.csv".to_string(),
        tamanho: 42,
        conteudo: "cod,nome_do_produto\n1,Mouse\n".to_string(),
    };

    assert!(selecionado.conteudo.starts_with("cod,"));
    assert_eq!(selecionado.tamanho, 42);
}
