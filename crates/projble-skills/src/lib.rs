//! Outbound capabilities used by the question router.

pub use projble_core::Generator;

mod generation_client;

pub use generation_client::{
    build_prompt, GenerationClient, GenerationError, FALLBACK_NETWORK, FALLBACK_NO_RESPONSE,
    FALLBACK_STATUS, FALLBACK_UNEXPECTED,
};
