//! Console Wordle
//!
//! Guess a hidden five-letter word in six tries. After each guess every
//! letter is marked correct, present elsewhere, or absent; hard mode makes
//! every later guess respect what has been revealed.
//!
//! # Quick Start
//!
//! ```rust
//! use console_wordle::game::Session;
//! use console_wordle::wordlists::WordStore;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let words = WordStore::from_words(["crane"]).unwrap();
//! let mut session = Session::new(words, StdRng::seed_from_u64(1));
//! session.start_round(false);
//!
//! let turn = session.submit("crane").unwrap();
//! assert!(turn.feedback.is_solved());
//! assert_eq!(session.score(), 7);
//! ```

// Core domain types
pub mod core;

// Round engine
pub mod game;

// Word lists
pub mod wordlists;

// Persisted preferences
pub mod settings;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
