// tests/cadastro_logic_tests.rs - Registration draft behavior
//
// The registration panel edits an immutable draft and derives the
// total on every read. These tests pin the scenarios a user actually
// hits: typing quantities, fixing one region, submitting incomplete
// forms.

use estoque_web::web_app::erro::ErroValidacao;
use estoque_web::web_app::model::rascunho::coagir_quantidade;
use estoque_web::web_app::model::{Filial, RascunhoProduto};

#[test]
fn test_total_deriva_das_tres_filiais() {
    let rascunho = RascunhoProduto::default()
        .com_estoque(Filial::Ceara, "5")
        .com_estoque(Filial::SantaCatarina, "3")
        .com_estoque(Filial::SaoPaulo, "2");

    assert_eq!(rascunho.total(), 10);
}

#[test]
fn test_corrigir_uma_filial_recalcula_o_total() {
    let rascunho = RascunhoProduto::default()
        .com_estoque(Filial::Ceara, "5")
        .com_estoque(Filial::SantaCatarina, "3")
        .com_estoque(Filial::SaoPaulo, "2")
        .com_estoque(Filial::SantaCatarina, "7");

    assert_eq!(rascunho.total(), 12);
}

#[test]
fn test_entrada_suja_nao_corrompe_o_total() {
    let rascunho = RascunhoProduto::default()
        .com_estoque(Filial::Ceara, "abc")
        .com_estoque(Filial::SantaCatarina, "")
        .com_estoque(Filial::SaoPaulo, "-3");

    assert_eq!(rascunho.total(), 0);
}

#[test]
fn test_coercao_de_quantidade() {
    assert_eq!(coagir_quantidade("7"), 7);
    assert_eq!(coagir_quantidade(" 7 "), 7);
    assert_eq!(coagir_quantidade(""), 0);
    assert_eq!(coagir_quantidade("sete"), 0);
    assert_eq!(coagir_quantidade("-1"), 0);
    assert_eq!(coagir_quantidade("2.5"), 0);
}

#[test]
fn test_envio_exige_codigo_numerico_e_nome() {
    let incompleto = RascunhoProduto {
        cod: "1234".to_string(),
        ..RascunhoProduto::default()
    };
    assert_eq!(
        incompleto.para_produto(),
        Err(ErroValidacao::CamposObrigatorios)
    );

    let cod_invalido = RascunhoProduto {
        cod: "12x4".to_string(),
        nome_do_produto: "Mouse".to_string(),
        ..RascunhoProduto::default()
    };
    assert_eq!(
        cod_invalido.para_produto(),
        Err(ErroValidacao::CamposObrigatorios)
    );
}

#[test]
fn test_envio_valido_carrega_total_derivado() {
    let rascunho = RascunhoProduto {
        cod: "1234".to_string(),
        nome_do_produto: "Mouse sem fio".to_string(),
        marca: "Logitech".to_string(),
        ..RascunhoProduto::default()
    }
    .com_estoque(Filial::Ceara, "4")
    .com_estoque(Filial::SaoPaulo, "6")
    .com_reserva("2");

    let produto = rascunho.para_produto().unwrap();
    assert_eq!(produto.cod, 1234);
    assert_eq!(produto.total, 10);
    assert_eq!(produto.reserva, 2);
    assert_eq!(produto.santa_catarina, 0);
}

#[test]
fn test_marca_e_opcional() {
    let sem_marca = RascunhoProduto {
        cod: "1".to_string(),
        nome_do_produto: "Cabo HDMI".to_string(),
        ..RascunhoProduto::default()
    };
    assert!(sem_marca.para_produto().is_ok());
}
