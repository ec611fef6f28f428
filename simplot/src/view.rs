use std::{error::Error, path::PathBuf};

use show_image::{ImageInfo, ImageView, create_window, run_context};

/// Opens the rendered chart in an image window and blocks until it is
/// closed. `run_context` takes over the main thread, so this never returns.
pub fn show(path: PathBuf) -> ! {
    run_context(move || -> Result<(), Box<dyn Error>> {
        let chart = image::open(&path)?.to_rgb8();
        let (width, height) = chart.dimensions();
        let pixels = chart.into_raw();

        let window = create_window("simplot", Default::default())?;
        window.set_image(
            "chart",
            ImageView::new(ImageInfo::rgb8(width, height), &pixels),
        )?;
        window.wait_until_destroyed()?;
        Ok(())
    })
}
