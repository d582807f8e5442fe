//! # Funções de Alinhamento de Memória
//!
//! Regiões de map/unmap são sempre alinhadas a página; tamanhos são passados
//! ao hospedeiro em unidades de página.

/// Tamanho de página do alvo (4 KiB).
pub const PAGE_SIZE: u32 = 0x1000;

/// Shift correspondente a `PAGE_SIZE`.
pub const PAGE_SHIFT: u32 = 12;

/// Verifica se um valor está alinhado a `align` (potência de dois).
///
/// # Exemplo
/// ```
/// assert!(is_aligned(16, 4));
/// assert!(!is_aligned(10, 4));
/// ```
#[inline(always)]
pub const fn is_aligned(val: u32, align: u32) -> bool {
    val & (align - 1) == 0
}

/// Verifica alinhamento de página.
#[inline(always)]
pub const fn is_page_aligned(val: u32) -> bool {
    is_aligned(val, PAGE_SIZE)
}

/// Converte um tamanho em bytes (já alinhado) para número de páginas.
#[inline(always)]
pub const fn pages_of(size: u32) -> u32 {
    size >> PAGE_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_alignment() {
        assert!(is_page_aligned(0x1400_0000));
        assert!(is_page_aligned(0));
        assert!(!is_page_aligned(0x1400_0800));
        assert_eq!(pages_of(0x1000), 1);
        assert_eq!(pages_of(0x40_0000), 0x400);
    }
}
