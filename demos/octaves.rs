use fbm_field::{
    generate_field, rasterize, Direction, Fractal, FractalParams, Palette, Param, PixelFormat,
    Simplex,
};

fn main() {
    let image_width = 400;
    let image_height = 300;

    let noise = Simplex::default();
    let palette = Palette::terrain();
    let mut params = FractalParams::default();
    params.nudge(Param::Octaves, Direction::Down);
    params.nudge(Param::Octaves, Direction::Down);

    // alpha is never written by the rasterizer, so set it once up front
    let mut pixels = vec![u8::MAX; image_width * image_height * 4];
    for _ in 0..6 {
        let field = generate_field(image_width, image_height, &params, Fractal::Fbm, &noise);
        rasterize(&field, &palette, &mut pixels, PixelFormat::Rgba8).unwrap();

        let image_buf =
            image::RgbaImage::from_raw(image_width as u32, image_height as u32, pixels.clone())
                .unwrap();
        image_buf
            .save(format!("data/output/octaves-{}.png", params.octaves))
            .unwrap();

        params.nudge(Param::Octaves, Direction::Up);
    }
}
