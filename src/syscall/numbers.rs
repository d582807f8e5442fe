//! # SVC Numbers Registry
//!
//! Catálogo dos ids de SVC que a extensão conhece.
//!
//! ## Codificação
//! - **Curta:** um byte, `0x00..=0xFD`, lido do frame de trap.
//! - **Estendida:** o byte vale `SVC_EXTENDED_SENTINEL` (0xFE) e o id real de
//!   32 bits está em r12.
//!
//! ## Organização
//!
//! | Range     | Categoria                                   |
//! |-----------|---------------------------------------------|
//! | 0x00-0x7D | Oficiais (com overrides explícitos)         |
//! | 0x7E-0x7F | Não usados (indefinido)                     |
//! | 0x80      | Controle estendido (multiplexado por opcode)|
//! | 0x90-0x94 | Manutenção de cache / tradução de endereço  |
//! | 0xA0-0xA3 | Memória estendida                           |
//! | 0xB0-0xB3 | Handles / processos / serviços              |
//! | resto     | Indefinido (fatal)                          |
//!
//! **ATENÇÃO**: os sentinelas de debug (`SVC_ENTRY_SENTINEL`,
//! `SVC_RETURN_SENTINEL`) podem colidir com ids legítimos numa revisão
//! futura do kernel hospedeiro. Risco de compatibilidade em aberto.

// ============================================================================
// CODIFICAÇÃO
// ============================================================================

/// Byte de id que indica "id estendido em r12".
pub const SVC_EXTENDED_SENTINEL: u8 = 0xFE;

/// Quantidade de entradas da tabela oficial (ids 0x00..=0x7D).
pub const OFFICIAL_SVC_COUNT: usize = 0x7E;

/// Maior id curto oficial.
pub const OFFICIAL_SVC_MAX: u32 = 0x7D;

// ============================================================================
// SENTINELAS DO CANAL DE DEBUG
// ============================================================================

/// Payload `address` do OutputString sintético de ENTRADA de SVC.
pub const SVC_ENTRY_SENTINEL: u32 = 0xFFFF_FFFE;

/// Payload `address` do OutputString sintético de RETORNO de SVC.
pub const SVC_RETURN_SENTINEL: u32 = 0xFFFF_FFFF;

// ============================================================================
// OVERRIDES DE IDS OFICIAIS (lista finita e explícita)
// ============================================================================

/// ControlMemory (oficial; marca o layout em sucesso).
pub const SVC_CONTROL_MEMORY: u32 = 0x01;

/// ExitProcess. Nunca retorna.
pub const SVC_EXIT_PROCESS: u32 = 0x03;

/// GetHandleInfo. r0 = handle, r1 = type -> r1:r2
pub const SVC_GET_HANDLE_INFO: u32 = 0x29;

/// GetSystemInfo. r0 = type, r1 = param -> r1:r2
pub const SVC_GET_SYSTEM_INFO: u32 = 0x2A;

/// GetProcessInfo. r0 = process, r1 = type -> r1:r2
pub const SVC_GET_PROCESS_INFO: u32 = 0x2B;

/// GetThreadInfo. r0 = thread, r1 = type -> r1:r2
pub const SVC_GET_THREAD_INFO: u32 = 0x2C;

/// GetCfwInfo (DEPRECATED). -> r1 = versão, r2 = commit
pub const SVC_GET_CFW_INFO: u32 = 0x2E;

/// Break. r0 = reason
pub const SVC_BREAK: u32 = 0x3C;

/// SetGpuProt. r0 = enabled
pub const SVC_SET_GPU_PROT: u32 = 0x59;

/// SetWifiEnabled. r0 = enabled
pub const SVC_SET_WIFI_ENABLED: u32 = 0x5A;

/// Backdoor. r0 = entry, r1 = arg -> r0 = retorno cru do callback
pub const SVC_BACKDOOR: u32 = 0x7B;

/// KernelSetState. r0 = type, r1..r3 = params
pub const SVC_KERNEL_SET_STATE: u32 = 0x7C;

// ============================================================================
// IDS DE EXTENSÃO
// ============================================================================

/// Controle estendido. r0 = opcode, r1 = arg -> r1
pub const SVC_EXTENDED_CONTROL: u32 = 0x80;

/// ConvertVaToPa. r0 = va, r1 = write_check -> r0 = pa cru (0 se não mapeado)
pub const SVC_CONVERT_VA_TO_PA: u32 = 0x90;
/// FlushDataCacheRange. r0 = addr, r1 = len
pub const SVC_FLUSH_DATA_CACHE_RANGE: u32 = 0x91;
/// FlushEntireDataCache.
pub const SVC_FLUSH_ENTIRE_DATA_CACHE: u32 = 0x92;
/// InvalidateInstructionCacheRange. r0 = addr, r1 = len
pub const SVC_INVALIDATE_INSTRUCTION_CACHE_RANGE: u32 = 0x93;
/// InvalidateEntireInstructionCache.
pub const SVC_INVALIDATE_ENTIRE_INSTRUCTION_CACHE: u32 = 0x94;

/// MapProcessMemoryEx. r0 = dst process, r1 = dst addr, r2 = src process, r3 = src addr, r4 = size
pub const SVC_MAP_PROCESS_MEMORY_EX: u32 = 0xA0;
/// UnmapProcessMemoryEx. r0 = process, r1 = addr, r2 = size
pub const SVC_UNMAP_PROCESS_MEMORY_EX: u32 = 0xA1;
/// ControlMemoryEx. r0 = op, r1 = addr0, r2 = addr1, r3 = size, r4 = perms -> r1
pub const SVC_CONTROL_MEMORY_EX: u32 = 0xA2;
/// ControlMemoryUnsafe. r0 = op, r1 = addr, r2 = size, r3 = perms -> r1
pub const SVC_CONTROL_MEMORY_UNSAFE: u32 = 0xA3;

/// ControlService. r0 = op, r1 = arg0, r2 = arg1 -> r1
pub const SVC_CONTROL_SERVICE: u32 = 0xB0;
/// CopyHandle. r0 = dst process, r1 = handle, r2 = src process -> r1
pub const SVC_COPY_HANDLE: u32 = 0xB1;
/// TranslateHandle. r0 = handle, r1 = class name ptr (0 = não copia) -> r1 = kaddr
pub const SVC_TRANSLATE_HANDLE: u32 = 0xB2;
/// ControlProcess. r0 = process, r1 = op, r2 = arg0, r3 = arg1 -> r1
pub const SVC_CONTROL_PROCESS: u32 = 0xB3;

// ============================================================================
// INFO TYPES ESTENDIDOS (Get*Info / KernelSetState)
// ============================================================================

/// Primeiro "type" reservado para a extensão nas SVCs de info oficiais.
pub const EXT_INFO_TYPE_BASE: u32 = 0x10000;
