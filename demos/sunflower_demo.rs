//! Generate a preset scene and print a summary
//!
//! ```text
//! RUST_LOG=debug cargo run --example sunflower_demo -- spiral
//! ```

use sunflower_cloud::*;

fn main() -> Result<()> {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "classic".to_string());
    let params = preset(&name)?;
    GenerationLimits::default().check(&params)?;

    println!("Preset '{}': {:?}", name, params);

    for scheme in ColorScheme::ALL {
        let params = GenerationParamsBuilder::from_params(params)
            .color_scheme(scheme)
            .build()?;
        let cloud = PointCloud::generate(params)?;

        let first = cloud.points()[0];
        let last = cloud.points()[cloud.len() - 1];
        println!(
            "  {:<16} {} points, first {} at {:?}, last {} at {:?}",
            scheme.name(),
            cloud.len(),
            first.color,
            first.position,
            last.color,
            last.position
        );
    }

    let scene = generate_scene(params)?;
    println!(
        "Scene: {} points, {} camera frames, first eye {:?}",
        scene.point_count(),
        scene.frame_count(),
        scene.camera_eyes[0]
    );

    let spin = generate_camera_path(camera::SPIN_FRAME_COUNT, &CameraOrbit::spin())?;
    println!(
        "Spin path: {} frames over {} revolutions",
        spin.len(),
        CameraOrbit::spin().revolutions()
    );

    println!("Available presets: {}", preset_names().join(", "));

    Ok(())
}
