use thiserror::Error;

pub mod figure;
pub mod render;
pub mod series;

pub use figure::Figure;
pub use render::render_png;
pub use series::Series;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("figure '{0}' has no series to plot")]
    EmptyFigure(String),
}
