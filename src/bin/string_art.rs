use std::env;
use std::path::Path;
use string_art::config::{load_config, RunConfig};
use string_art::diagnostics::{RunStats, RunSummary};
use string_art::estimate::{
    estimate, format_digital_time, format_physical_time, format_thread_length,
};
use string_art::export::export_connections;
use string_art::image::io::{
    load_luminance_image, save_grayscale_u8, write_json_file, write_text_file,
};
use string_art::raster::rasterize;
use string_art::render::{render_result, RenderOptions};
use string_art::{worker, DarknessField, StringArtResult};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let params = config.resolved_params();
    params.validate().map_err(|e| e.to_string())?;

    let est = estimate(params.pegs_per_side, params.iterations);
    println!(
        "Generating {} lines over {} pegs (expected {}-{})",
        params.iterations,
        params.total_pegs(),
        format_digital_time(est.digital_secs.0),
        format_digital_time(est.digital_secs.1)
    );

    let gray = load_luminance_image(&config.input, params.frame_pixels() as u32)?;
    let field = DarknessField::from_luminance(&gray.as_view(), config.invert);

    let handle = worker::spawn(field, params.clone()).map_err(|e| e.to_string())?;
    let (result, stats) = handle
        .wait(|p| {
            if p.finished || p.completed % 100 == 0 {
                println!("  {:>6}/{} lines (peg {})", p.completed, p.total, p.current_peg);
            }
        })
        .map_err(|e| e.to_string())?;

    write_outputs(&config, &result, &stats)?;

    println!(
        "Done: {} lines in {:.1} ms{}",
        stats.completed,
        stats.elapsed_ms,
        if stats.early_stop { " (no darkness left)" } else { "" }
    );
    println!(
        "Build estimate: {} (beginner) / {} (average) / {} (experienced), thread {}-{}",
        format_physical_time(est.build_minutes.beginner),
        format_physical_time(est.build_minutes.average),
        format_physical_time(est.build_minutes.experienced),
        format_thread_length(est.thread_m.0),
        format_thread_length(est.thread_m.1)
    );
    Ok(())
}

fn write_outputs(
    config: &RunConfig,
    result: &StringArtResult,
    stats: &RunStats,
) -> Result<(), String> {
    let out = &config.output;
    for &format in &out.formats {
        let path = out.export_path(format);
        write_text_file(&path, &export_connections(&result.connections, format))?;
        println!("Saved {format} instructions to {}", path.display());
    }

    let params = config.resolved_params();
    if let Some(name) = &out.preview {
        let opts = RenderOptions {
            line_opacity: params.line_opacity,
            max_lines: None,
        };
        let path = out.dir.join(name);
        save_grayscale_u8(&render_result(result, &opts), &path)?;
        println!("Saved preview to {}", path.display());
    }

    if let Some(name) = &out.residual {
        // replay the sequence against a fresh field to recover what is left
        let gray = load_luminance_image(&config.input, params.frame_pixels() as u32)?;
        let mut field = DarknessField::from_luminance(&gray.as_view(), config.invert);
        for (from, to) in result.lines() {
            field.subtract_along(&rasterize(from.pos, to.pos), params.darkening());
        }
        let path = out.dir.join(name);
        save_grayscale_u8(&field.to_grayscale(), &path)?;
        println!("Saved residual darkness to {}", path.display());
    }

    if let Some(name) = &out.summary_json {
        let summary = RunSummary {
            input: config.input.display().to_string(),
            invert: config.invert,
            total_pegs: params.total_pegs(),
            estimates: estimate(params.pegs_per_side, params.iterations),
            params,
            stats: stats.clone(),
            connections: result.connections.clone(),
        };
        let path = out.dir.join(name);
        write_json_file(&path, &summary)?;
        println!("Saved run summary to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: string_art <config.json>".to_string()
}
