//! ABI de SVCs (frame de trap)
//!
//! # Convenção de Registradores
//!
//! | Registrador | Uso                                   |
//! |-------------|---------------------------------------|
//! | r0..r7      | Argumentos                            |
//! | r12         | Id estendido (quando o byte é 0xFE)   |
//! | r0          | Retorno: código de resultado          |
//! | r1..r7      | Retorno: valores de saída             |
//!
//! O byte do id é gravado pelo vetor de exceção no frame; a leitura é
//! volátil porque o frame é memória escrita fora do modelo do compilador.

use volatile::VolatileRef;

use super::error::ResultCode;
use super::numbers::SVC_EXTENDED_SENTINEL;

/// Máximo de argumentos em registradores
pub const MAX_SVC_ARGS: usize = 8;

/// Frame salvo na entrada de uma SVC.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrapFrame {
    pub r0: u32,
    pub r1: u32,
    pub r2: u32,
    pub r3: u32,
    pub r4: u32,
    pub r5: u32,
    pub r6: u32,
    pub r7: u32,
    /// Slot do id estendido.
    pub r12: u32,
    pub lr: u32,
    /// Byte do id curto (imediato da instrução `svc`).
    pub svc_id: u8,
}

impl TrapFrame {
    /// Frame de uma SVC curta.
    pub const fn with_short_id(svc_id: u8) -> Self {
        Self {
            r0: 0,
            r1: 0,
            r2: 0,
            r3: 0,
            r4: 0,
            r5: 0,
            r6: 0,
            r7: 0,
            r12: 0,
            lr: 0,
            svc_id,
        }
    }

    /// Frame de uma SVC estendida (sentinela + id em r12).
    pub const fn with_extended_id(svc_id: u32) -> Self {
        let mut frame = Self::with_short_id(SVC_EXTENDED_SENTINEL);
        frame.r12 = svc_id;
        frame
    }

    /// Id efetivo da SVC (decodifica a forma estendida).
    pub fn decode_svc_id(&self) -> u32 {
        let short = VolatileRef::from_ref(&self.svc_id).as_ptr().read();
        if short == SVC_EXTENDED_SENTINEL {
            VolatileRef::from_ref(&self.r12).as_ptr().read()
        } else {
            short as u32
        }
    }

    /// Argumento `index` (0..8). Fora do range lê zero.
    #[inline]
    pub fn arg(&self, index: usize) -> u32 {
        match index {
            0 => self.r0,
            1 => self.r1,
            2 => self.r2,
            3 => self.r3,
            4 => self.r4,
            5 => self.r5,
            6 => self.r6,
            7 => self.r7,
            _ => 0,
        }
    }

    /// Grava o registrador `index`. Fora do range é ignorado.
    #[inline]
    pub fn set_reg(&mut self, index: usize, value: u32) {
        match index {
            0 => self.r0 = value,
            1 => self.r1 = value,
            2 => self.r2 = value,
            3 => self.r3 = value,
            4 => self.r4 = value,
            5 => self.r5 = value,
            6 => self.r6 = value,
            7 => self.r7 = value,
            _ => {}
        }
    }

    /// Código de resultado em r0.
    #[inline]
    pub fn set_result(&mut self, result: ResultCode) {
        self.r0 = result.raw();
    }

    #[inline]
    pub fn result(&self) -> ResultCode {
        ResultCode::from_raw(self.r0)
    }

    /// Argumentos builder-style (testes e hospedeiro).
    pub fn with_args(mut self, args: &[u32]) -> Self {
        for (index, value) in args.iter().enumerate().take(MAX_SVC_ARGS) {
            self.set_reg(index, *value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        let frame = TrapFrame::with_short_id(0x2B);
        assert_eq!(frame.decode_svc_id(), 0x2B);
    }

    #[test]
    fn test_extended_id_reads_r12() {
        let frame = TrapFrame::with_extended_id(0xA1);
        assert_eq!(frame.svc_id, SVC_EXTENDED_SENTINEL);
        assert_eq!(frame.decode_svc_id(), 0xA1);
    }

    #[test]
    fn test_r12_ignored_for_short_id() {
        let mut frame = TrapFrame::with_short_id(0x03);
        frame.r12 = 0xA1;
        assert_eq!(frame.decode_svc_id(), 0x03);
    }

    #[test]
    fn test_args_and_outputs() {
        let mut frame = TrapFrame::with_short_id(0).with_args(&[1, 2, 3]);
        assert_eq!(frame.arg(0), 1);
        assert_eq!(frame.arg(2), 3);
        assert_eq!(frame.arg(9), 0);

        frame.set_result(ResultCode::INVALID_HANDLE);
        frame.set_reg(1, 0xCAFE);
        assert_eq!(frame.r0, 0xD8E0_07F7);
        assert_eq!(frame.r1, 0xCAFE);
    }
}
