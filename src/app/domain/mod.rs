pub use lead::Lead;

mod lead;
