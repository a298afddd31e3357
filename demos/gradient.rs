use fbm_field::{
    generate_field, rasterize, Color, Fractal, FractalParams, Palette, PixelFormat, Simplex,
};

fn main() {
    let image_width = 512;
    let image_height = 512;

    let noise = Simplex::new(0);
    let params = FractalParams::new(0.01, 2.0, 0.5, 6).unwrap();
    let palette = Palette::gradient(Color::BLACK, Color::WHITE);

    for (fractal, filename) in [
        (Fractal::Fbm, "data/output/gradient-fbm.png"),
        (Fractal::Turbulence, "data/output/gradient-turbulence.png"),
    ] {
        let field = generate_field(image_width, image_height, &params, fractal, &noise);
        println!("{:?}: range {:?}", fractal, field.range());

        let mut image_buf = image::RgbImage::new(image_width as u32, image_height as u32);
        rasterize(&field, &palette, &mut image_buf, PixelFormat::Rgb8).unwrap();
        image_buf.save(filename).unwrap();
    }
}
