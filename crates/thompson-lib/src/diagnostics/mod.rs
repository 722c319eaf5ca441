//! Rendering compile errors as annotated source snippets.

mod printer;


pub use printer::ErrorPrinter;
