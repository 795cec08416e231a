// web_app/model/requisicao.rs - In-flight request bookkeeping
//
// Each panel runs at most one request at a time, but nothing cancels a
// superseded request: its response still arrives later. Every dispatch
// takes a fresh token from the generation counter and a response is
// applied only while its token is still the current one, so a stale
// response can never overwrite newer state.

/// Monotonic request-generation counter, one per panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeracaoRequisicao {
    atual: u64,
}

impl GeracaoRequisicao {
    pub fn nova() -> Self {
        Self::default()
    }

    /// Starts a new request, invalidating all earlier tokens.
    pub fn emitir(&mut self) -> u64 {
        self.atual += 1;
        self.atual
    }

    /// True while no newer request has been dispatched.
    pub fn eh_atual(&self, token: u64) -> bool {
        self.atual == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_recem_emitido_e_atual() {
        let mut geracao = GeracaoRequisicao::nova();
        let token = geracao.emitir();
        assert!(geracao.eh_atual(token));
    }

    #[test]
    fn test_nova_emissao_invalida_token_antigo() {
        let mut geracao = GeracaoRequisicao::nova();
        let primeiro = geracao.emitir();
        let segundo = geracao.emitir();

        assert!(!geracao.eh_atual(primeiro));
        assert!(geracao.eh_atual(segundo));
    }

    #[test]
    fn test_tokens_sao_monotonicos() {
        let mut geracao = GeracaoRequisicao::nova();
        let mut anterior = 0;
        for _ in 0..100 {
            let token = geracao.emitir();
            assert!(token > anterior);
            anterior = token;
        }
    }
}
