use fbm_field::{generate_field, render_rgba, Fractal, FractalParams, Palette, Simplex};

fn main() {
    let image_width = 800;
    let image_height = 600;

    let noise = Simplex::default();
    let params = FractalParams::default();
    let field = generate_field(
        image_width,
        image_height,
        &params,
        Fractal::Turbulence,
        &noise,
    );

    let pixels = render_rgba(&field, &Palette::terrain());
    let image_buf =
        image::RgbaImage::from_raw(image_width as u32, image_height as u32, pixels).unwrap();

    image_buf.save("data/output/terrain.png").unwrap();
}
