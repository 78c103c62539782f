// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_backend::InMemoryBackend;

pub mod blocking;
mod in_memory_backend;
pub mod roster;
pub mod sessions;
