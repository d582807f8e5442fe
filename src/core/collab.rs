//! Colaboradores externos
//!
//! Subsistemas que a extensão CHAMA mas não possui: o plugin loader e o
//! gerenciador de sessão interativa (menu). A extensão nunca inspeciona o
//! estado interno deles e nunca os chama segurando a seção crítica.

use bitflags::bitflags;

use crate::core::thread::KThread;

bitflags! {
    /// Estado da sessão interativa.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SessionMode: u32 {
        /// Menu interativo aberto.
        const MENU_OPEN         = 1 << 0;
        /// Entrada redirecionada (não trava threads).
        const INPUT_REDIRECTION = 1 << 1;
        /// Troca de plugin em andamento.
        const PLUGIN_SWAP       = 1 << 2;
    }
}

impl SessionMode {
    /// Bits que pedem interceptação de threads no pós-processamento.
    pub const INTERCEPT_MASK: SessionMode =
        SessionMode::MENU_OPEN.union(SessionMode::PLUGIN_SWAP);
}

/// Plugin loader.
pub trait PluginLoader {
    /// O loader está ativo (plugin carregado e rodando)?
    fn is_running(&self) -> bool;

    /// Avisa o loader que o processo está saindo.
    fn signal_exit(&self);
}

/// Gerenciador de sessão interativa.
pub trait InteractiveSession<T: KThread> {
    fn mode(&self) -> SessionMode;

    /// Liga/desliga bits de modo (KernelSetState estendido).
    fn set_mode(&self, bits: SessionMode, enable: bool);

    /// A thread deve ser interceptada dado o modo atual?
    fn should_intercept(&self, thread: &T, mode: SessionMode) -> bool;

    /// Reagenda a thread (`lock = true` estaciona).
    fn reschedule(&self, thread: &T, lock: bool);
}
