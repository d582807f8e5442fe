//! Sink de saída dos logs.
//!
//! A extensão não tem driver serial próprio: o hospedeiro registra um sink
//! uma única vez no boot. Antes disso toda saída é descartada.
//!
//! SEM `core::fmt`: o valor hexadecimal é montado à mão num buffer de pilha.

use spin::Once;

/// Destino das linhas de log (UART, ring buffer do hospedeiro, etc).
pub trait LogSink: Sync {
    fn write_str(&self, s: &str);
}

static SINK: Once<&'static dyn LogSink> = Once::new();

/// Registra o sink global. Retorna `false` se já havia um registrado.
pub fn install(sink: &'static dyn LogSink) -> bool {
    let mut installed = false;
    SINK.call_once(|| {
        installed = true;
        sink
    });
    installed
}

/// Sink já registrado?
pub fn is_installed() -> bool {
    SINK.is_completed()
}

#[inline]
pub fn emit_str(s: &str) {
    if let Some(sink) = SINK.get() {
        sink.write_str(s);
    }
}

#[inline]
pub fn emit_nl() {
    emit_str("\n");
}

pub fn emit_hex(value: u64) {
    let mut buf = [0u8; HEX_BUF_LEN];
    emit_str(format_hex(value, &mut buf));
}

/// "0x" + até 16 dígitos.
pub const HEX_BUF_LEN: usize = 18;

/// Formata `value` como `0x...` sem zeros à esquerda.
pub fn format_hex(value: u64, buf: &mut [u8; HEX_BUF_LEN]) -> &str {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    buf[0] = b'0';
    buf[1] = b'x';

    let mut len = 2;
    let mut started = false;
    for shift in (0..16).rev() {
        let nibble = ((value >> (shift * 4)) & 0xF) as usize;
        if nibble != 0 || started || shift == 0 {
            started = true;
            buf[len] = DIGITS[nibble];
            len += 1;
        }
    }

    // Só ASCII foi escrito.
    core::str::from_utf8(&buf[..len]).unwrap_or("0x?")
}
