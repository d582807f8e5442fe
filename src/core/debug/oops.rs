// Arquivo: core/debug/oops.rs
//
// Propósito: Caminhos fatais da extensão.
// Uma SVC sem handler definido é violação de contrato: continuar executaria
// código contra um contrato indefinido. Não existe código de erro aqui, o
// núcleo para.
//
// Detalhes de Implementação:
// - Loga o erro de forma visível.
// - Entra em `panic!`; o panic handler do hospedeiro faz o halt do núcleo.

//! Kernel Oops (Erros fatais)

/// SVC sem handler (id reservado ou fora dos ranges documentados).
#[cold]
#[inline(never)]
pub fn undefined_svc(svc_id: u32) -> ! {
    crate::kerror!("*****************************************************");
    crate::kerror!("*            SVC INDEFINIDA - HALT                  *");
    crate::kerror!("*****************************************************");
    crate::kerror!("svc id=", svc_id);
    panic!("undefined svc id {:#x}", svc_id);
}

/// Tabela oficial consultada antes da instalação no boot.
#[cold]
#[inline(never)]
pub fn table_not_installed(svc_id: u32) -> ! {
    crate::kerror!("(Dispatch) Tabela oficial nao instalada, svc id=", svc_id);
    panic!("official svc table read before installation (svc {:#x})", svc_id);
}
