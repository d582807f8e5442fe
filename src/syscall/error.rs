//! Códigos de Resultado
//!
//! Resultados são tokens opacos de 32 bits no formato empacotado do kernel
//! hospedeiro. Só os literais documentados aqui podem ser comparados; o
//! resto é repassado sem interpretação.
//!
//! "Handle inválido" tem UM valor canônico para todos os handlers.

/// Código de resultado opaco.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ResultCode(u32);

impl ResultCode {
    /// Sucesso
    pub const SUCCESS: ResultCode = ResultCode(0);

    // === Argumento inválido (nunca repetir) ===
    /// Handle não resolve para um objeto da classe esperada
    pub const INVALID_HANDLE: ResultCode = ResultCode(0xD8E0_07F7);
    /// Valor de enum/opcode desconhecido
    pub const INVALID_ENUM_VALUE: ResultCode = ResultCode(0xD8E0_07ED);
    /// Ponteiro de userspace inválido
    pub const INVALID_POINTER: ResultCode = ResultCode(0xD8E0_07F6);
    /// Endereço não alinhado a página
    pub const MISALIGNED_ADDRESS: ResultCode = ResultCode(0xE0E0_1BF1);
    /// Tamanho não alinhado a página
    pub const MISALIGNED_SIZE: ResultCode = ResultCode(0xE0E0_1BF2);
    /// Valor fora do range aceito
    pub const OUT_OF_RANGE: ResultCode = ResultCode(0xE0E0_1BFD);

    // === Recursos ===
    /// Serviço/objeto não encontrado
    pub const NOT_FOUND: ResultCode = ResultCode(0xD880_07FA);

    // === Sistema ===
    /// Operação não implementada
    pub const NOT_IMPLEMENTED: ResultCode = ResultCode(0xF8C0_07F4);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Bit 31 limpo = sucesso (formato do hospedeiro).
    #[inline]
    pub const fn is_success(self) -> bool {
        (self.0 as i32) >= 0
    }

    #[inline]
    pub const fn is_failure(self) -> bool {
        !self.is_success()
    }

    /// Converte para `SvcResult<()>`.
    #[inline]
    pub fn into_result(self) -> SvcResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl core::fmt::Debug for ResultCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ResultCode({:#010X})", self.0)
    }
}

/// Resultado de handler: Ok(valor) ou Err(ResultCode)
pub type SvcResult<T> = Result<T, ResultCode>;

/// Colapsa um `SvcResult<()>` no código que vai para r0.
#[inline]
pub fn result_code(result: SvcResult<()>) -> ResultCode {
    match result {
        Ok(()) => ResultCode::SUCCESS,
        Err(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_bit() {
        assert!(ResultCode::SUCCESS.is_success());
        assert!(ResultCode::INVALID_HANDLE.is_failure());
        assert!(ResultCode::NOT_IMPLEMENTED.is_failure());
        assert_eq!(ResultCode::from_raw(0x1234).into_result(), Ok(()));
        assert_eq!(
            ResultCode::INVALID_HANDLE.into_result(),
            Err(ResultCode::INVALID_HANDLE)
        );
    }
}
