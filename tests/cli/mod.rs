pub mod support;

mod path;
mod shortest;
mod traverse;
