//! # Official SVC Table
//!
//! Endereços dos handlers ORIGINAIS do kernel hospedeiro, indexados pelo id
//! curto (0x00..=0x7D).
//!
//! - Escrita UMA vez no boot, antes de qualquer núcleo habilitar o trap.
//! - Depois disso é só leitura: sem lock.
//! - Nenhuma entrada válida é nula (garantido na instalação pelo tipo `SvcEntry`).

use core::num::NonZeroUsize;

use spin::Once;

use super::super::numbers::OFFICIAL_SVC_COUNT;

/// Endereço não-nulo de um handler oficial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SvcEntry(NonZeroUsize);

impl SvcEntry {
    /// `None` para endereço nulo.
    pub const fn new(addr: usize) -> Option<Self> {
        match NonZeroUsize::new(addr) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    pub const fn addr(self) -> usize {
        self.0.get()
    }
}

/// Falha na instalação da tabela.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallError {
    /// A entrada `index` veio nula do boot.
    NullEntry(u32),
    /// A tabela já foi instalada.
    AlreadyInstalled,
}

/// Tabela oficial (write-once).
pub struct OfficialTable {
    entries: Once<[Option<SvcEntry>; OFFICIAL_SVC_COUNT]>,
}

impl OfficialTable {
    pub const fn new() -> Self {
        Self { entries: Once::new() }
    }

    /// Instala os endereços capturados no boot. Rejeita entradas nulas.
    pub fn install(&self, raw: &[usize; OFFICIAL_SVC_COUNT]) -> Result<(), InstallError> {
        let entries: [Option<SvcEntry>; OFFICIAL_SVC_COUNT] =
            core::array::from_fn(|index| SvcEntry::new(raw[index]));

        if let Some(index) = entries.iter().position(Option::is_none) {
            crate::kerror!("(Dispatch) Entrada oficial nula, id=", index);
            return Err(InstallError::NullEntry(index as u32));
        }

        let mut installed = false;
        self.entries.call_once(|| {
            installed = true;
            entries
        });

        if installed {
            crate::kok!("(Dispatch) Tabela oficial instalada");
            Ok(())
        } else {
            crate::kwarn!("(Dispatch) Tabela oficial ja instalada");
            Err(InstallError::AlreadyInstalled)
        }
    }

    pub fn is_installed(&self) -> bool {
        self.entries.is_completed()
    }

    /// Handler oficial do id curto `svc_id`. `None` fora do range ou antes da instalação.
    #[inline]
    pub fn get(&self, svc_id: u32) -> Option<SvcEntry> {
        self.entries.get()?.get(svc_id as usize).copied().flatten()
    }
}

impl Default for OfficialTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Tabela global usada pelo trap real.
pub static OFFICIAL_SVCS: OfficialTable = OfficialTable::new();
