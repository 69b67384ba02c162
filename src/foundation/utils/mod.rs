mod text;

pub use text::fit_cell;
