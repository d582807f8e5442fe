//! Interface Abstrata de Manutenção de Cache (HAL).
//!
//! Mudanças na tabela de mapeamento NÃO ficam visíveis automaticamente para o
//! fetch de instruções em um alvo multicore. Quem altera mapeamentos precisa
//! invalidar o I-cache e fazer flush do D-cache explicitamente.

/// Operações de cache que o hospedeiro deve implementar.
///
/// As versões "entire" atuam na máquina inteira (todos os núcleos).
pub trait CacheMaintenance {
    /// Invalida todo o cache de instruções (todos os núcleos).
    fn invalidate_entire_instruction_cache(&self);

    /// Faz flush (clean + invalidate) de todo o cache de dados.
    fn flush_entire_data_cache(&self);

    /// Invalida o I-cache no intervalo `[addr, addr + len)`.
    fn invalidate_instruction_cache_range(&self, addr: u32, len: u32);

    /// Faz flush do D-cache no intervalo `[addr, addr + len)`.
    fn flush_data_cache_range(&self, addr: u32, len: u32);

    /// Sequência completa usada após mudanças de mapeamento:
    /// I-cache primeiro, depois D-cache.
    #[inline]
    fn sync_after_remap(&self) {
        self.invalidate_entire_instruction_cache();
        self.flush_entire_data_cache();
    }
}
