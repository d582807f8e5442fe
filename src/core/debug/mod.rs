// Arquivo: core/debug/mod.rs
//
// Propósito: Módulo de diagnóstico da extensão.
//
// Módulos contidos:
// - `sink`: destino das linhas de log (registrado pelo hospedeiro).
// - `oops`: caminhos fatais (violação de invariante do dispatch).

pub mod oops;
pub mod sink;
