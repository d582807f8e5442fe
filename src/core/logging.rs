// =============================================================================
// KEXT LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Logging da extensão com custo ZERO quando desabilitado.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - o caminho de SVC não pode formatar
// - SEM alocação - Apenas strings literais + um valor hex
// - Escreve no sink registrado pelo hospedeiro (core::debug::sink)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Violações de invariante (logo antes do halt)
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Instalação, eventos raros
// - DEBUG: Decisões de handlers de extensão
// - TRACE: Cada SVC interceptada
//
// COMO USAR:
//   kinfo!("(Dispatch) Tabela oficial instalada");   // Apenas string
//   ktrace!("(Svc) id=", id);                         // String + hex
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// kerror! - Sempre ativo (exceto com no_logs).
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_ERROR);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_ERROR);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_hex($val as u64);
        $crate::core::debug::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================
//
// kwarn! - Ativo exceto com no_logs.
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_WARN);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_WARN);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_hex($val as u64);
        $crate::core::debug::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================
//
// kinfo! - Ativo com log_info, log_debug ou log_trace.
//

#[cfg(any(feature = "log_info", feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kinfo {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_INFO);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_INFO);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_hex($val as u64);
        $crate::core::debug::sink::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_info", feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================
//
// kdebug! - Ativo com log_debug ou log_trace.
//

#[cfg(any(feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kdebug {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_DEBUG);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_DEBUG);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_hex($val as u64);
        $crate::core::debug::sink::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================
//
// ktrace! - Apenas com log_trace. Roda em TODA SVC, manter barato.
//

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_TRACE);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::core::debug::sink::emit_str($crate::core::logging::P_TRACE);
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_hex($val as u64);
        $crate::core::debug::sink::emit_nl();
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE STATUS
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::core::debug::sink::emit_str("\x1b[32m[OK]\x1b[0m ");
        $crate::core::debug::sink::emit_str($msg);
        $crate::core::debug::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}
