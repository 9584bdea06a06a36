//! Shared building blocks used across commands.

/// Platform-specific application data directory resolution.
pub mod data_storage;

/// Centralized user-facing message system and display macros.
pub mod messages;

/// Persisted user preferences (window geometry, theme, sound).
pub mod preferences;

/// Audible interaction cues.
pub mod sound;

/// Task entity, validation and the store's error taxonomy.
pub mod task;

/// Terminal table rendering.
pub mod view;
