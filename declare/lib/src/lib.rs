//! Api declaration generator library.
//!
//! This crate generates TypeScript declarations (`.d.ts`) for an apis object:
//! a mapping of api group → request function → parameter spec. The generated
//! code includes:
//!
//! - A shared preamble (`Result`, `ReqFn`, `RuntimeOptions`,
//!   `ReqFnWithAnyParams`)
//! - One `export const <group>: { ... }` block per api group
//! - One overload signature per request function, typed by its declared
//!   parameters and their requiredness
//!
//! ## Modules
//!
//! - [`model`] - Typed api map and validation of raw JSON input
//! - [`attrs`] - Parameter attribute lists (`id?: any, name: any`)
//! - [`table`] - Per-group function signatures and their ordering
//! - [`module`] - Preamble and full module assembly
//! - [`indent`] - Template indentation normalization
//! - [`loader`] - Reading the apis document from disk
//! - [`output`] - Target resolution, overwrite guard and atomic writes
//! - [`config`] - Run options
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```
//! use declare_lib::generate_from_value;
//! use serde_json::json;
//!
//! let code = generate_from_value(&json!({
//!     "user": {
//!         "getInfo": { "params": ["id"] },
//!         "login": { "params": { "phone": { "required": true }, "code": {} } }
//!     }
//! }))
//! .unwrap();
//!
//! assert!(code.contains("export const user: {"));
//! assert!(code.contains("params: { id?: any },"));
//! assert!(code.contains("params: { phone: any, code?: any },"));
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! // default response result
//! interface Result { code: number, data: any, msg?: string }
//! ...
//!
//! export const user: {
//!     'getInfo': ReqFn & {
//!         <T = Result>(
//!             params: { id?: any },
//!             options?: RuntimeOptions
//!         ): Promise<T>
//!     }
//!     'logout': ReqFnWithAnyParams
//! }
//! ```

pub mod attrs;
pub mod config;
pub mod error;
pub mod indent;
pub mod loader;
pub mod model;
pub mod module;
pub mod output;
pub mod table;

pub use config::{DeclareOptions, OverwritePolicy};
pub use error::DeclareError;
pub use model::ApiMap;
pub use module::{generate_declarations, generate_from_value};
pub use output::{Generation, WriteOutcome, generate_and_write};
