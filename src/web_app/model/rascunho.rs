// web_app/model/rascunho.rs - Registration form draft
//
// The draft is an immutable value: every edit produces a new draft and
// the signal holding it is replaced wholesale. `total` is not stored;
// it is always computed from the three region quantities, so it cannot
// drift from them.

use super::{Filial, Produto};
use crate::web_app::erro::ErroValidacao;

/// Mutable-by-replacement state of the registration form.
///
/// `cod` stays raw text while the user types; it is only parsed when
/// the draft is turned into a wire record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RascunhoProduto {
    pub cod: String,
    pub nome_do_produto: String,
    pub marca: String,
    pub ceara: i64,
    pub santa_catarina: i64,
    pub sao_paulo: i64,
    pub reserva: i64,
}

impl RascunhoProduto {
    /// Sum of the three region quantities.
    pub fn total(&self) -> i64 {
        self.ceara + self.santa_catarina + self.sao_paulo
    }

    /// Current quantity for one region.
    pub fn estoque(&self, filial: Filial) -> i64 {
        match filial {
            Filial::Ceara => self.ceara,
            Filial::SantaCatarina => self.santa_catarina,
            Filial::SaoPaulo => self.sao_paulo,
        }
    }

    /// Returns the draft with one region quantity replaced by the raw
    /// form input.
    pub fn com_estoque(mut self, filial: Filial, entrada: &str) -> Self {
        let valor = coagir_quantidade(entrada);
        match filial {
            Filial::Ceara => self.ceara = valor,
            Filial::SantaCatarina => self.santa_catarina = valor,
            Filial::SaoPaulo => self.sao_paulo = valor,
        }
        self
    }

    pub fn com_reserva(mut self, entrada: &str) -> Self {
        self.reserva = coagir_quantidade(entrada);
        self
    }

    /// Builds the wire record, validating the required fields: `cod`
    /// must parse to an integer and the name must be non-empty.
    pub fn para_produto(&self) -> Result<Produto, ErroValidacao> {
        let cod = self
            .cod
            .trim()
            .parse::<i64>()
            .map_err(|_| ErroValidacao::CamposObrigatorios)?;
        if self.nome_do_produto.trim().is_empty() {
            return Err(ErroValidacao::CamposObrigatorios);
        }

        Ok(Produto {
            cod,
            nome_do_produto: self.nome_do_produto.clone(),
            marca: self.marca.clone(),
            ceara: self.ceara,
            santa_catarina: self.santa_catarina,
            sao_paulo: self.sao_paulo,
            total: self.total(),
            reserva: self.reserva,
        })
    }
}

/// Form inputs arrive as text; quantities are non-negative integers.
/// Anything unparseable becomes 0, negatives are clamped to 0.
pub fn coagir_quantidade(entrada: &str) -> i64 {
    entrada.trim().parse::<i64>().unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rascunho_padrao_vazio() {
        let rascunho = RascunhoProduto::default();
        assert_eq!(rascunho.cod, "");
        assert_eq!(rascunho.nome_do_produto, "");
        assert_eq!(rascunho.marca, "");
        assert_eq!(rascunho.total(), 0);
        assert_eq!(rascunho.reserva, 0);
    }

    #[test]
    fn test_total_e_soma_das_filiais() {
        let rascunho = RascunhoProduto::default()
            .com_estoque(Filial::Ceara, "5")
            .com_estoque(Filial::SantaCatarina, "3")
            .com_estoque(Filial::SaoPaulo, "2");
        assert_eq!(rascunho.total(), 10);

        // Editar uma filial recalcula o total.
        let rascunho = rascunho.com_estoque(Filial::SantaCatarina, "7");
        assert_eq!(rascunho.total(), 12);
    }

    #[test]
    fn test_total_acompanha_qualquer_sequencia_de_edicoes() {
        let entradas = [
            [(Filial::Ceara, "0"), (Filial::SantaCatarina, "0"), (Filial::SaoPaulo, "0")],
            [(Filial::Ceara, "1"), (Filial::SantaCatarina, "10"), (Filial::SaoPaulo, "100")],
            [(Filial::SaoPaulo, "42"), (Filial::Ceara, "7"), (Filial::SantaCatarina, "13")],
            [(Filial::Ceara, "abc"), (Filial::SantaCatarina, "8"), (Filial::SaoPaulo, "")],
        ];

        for edicoes in entradas {
            let mut rascunho = RascunhoProduto::default();
            for (filial, entrada) in edicoes {
                rascunho = rascunho.com_estoque(filial, entrada);
            }
            assert_eq!(
                rascunho.total(),
                rascunho.ceara + rascunho.santa_catarina + rascunho.sao_paulo
            );
        }
    }

    #[test]
    fn test_entrada_nao_numerica_vira_zero() {
        assert_eq!(coagir_quantidade(""), 0);
        assert_eq!(coagir_quantidade("abc"), 0);
        assert_eq!(coagir_quantidade("1.5"), 0);
        assert_eq!(coagir_quantidade(" 12 "), 12);
    }

    #[test]
    fn test_quantidade_negativa_vira_zero() {
        assert_eq!(coagir_quantidade("-5"), 0);
    }

    #[test]
    fn test_para_produto_exige_cod_e_nome() {
        let sem_nada = RascunhoProduto::default();
        assert_eq!(
            sem_nada.para_produto(),
            Err(ErroValidacao::CamposObrigatorios)
        );

        let so_cod = RascunhoProduto {
            cod: "1234".to_string(),
            ..RascunhoProduto::default()
        };
        assert_eq!(so_cod.para_produto(), Err(ErroValidacao::CamposObrigatorios));

        let so_nome = RascunhoProduto {
            nome_do_produto: "X".to_string(),
            ..RascunhoProduto::default()
        };
        assert_eq!(
            so_nome.para_produto(),
            Err(ErroValidacao::CamposObrigatorios)
        );

        let cod_invalido = RascunhoProduto {
            cod: "12a4".to_string(),
            nome_do_produto: "X".to_string(),
            ..RascunhoProduto::default()
        };
        assert_eq!(
            cod_invalido.para_produto(),
            Err(ErroValidacao::CamposObrigatorios)
        );
    }

    #[test]
    fn test_para_produto_carrega_o_total_derivado() {
        let rascunho = RascunhoProduto {
            cod: " 1234 ".to_string(),
            nome_do_produto: "Câmera Digital".to_string(),
            marca: "Sony".to_string(),
            ceara: 5,
            santa_catarina: 3,
            sao_paulo: 2,
            reserva: 1,
        };

        let produto = rascunho.para_produto().unwrap();
        assert_eq!(produto.cod, 1234);
        assert_eq!(produto.nome_do_produto, "Câmera Digital");
        assert_eq!(produto.marca, "Sony");
        assert_eq!(produto.total, 10);
        assert_eq!(produto.reserva, 1);
    }
}
