//! Demo: plan a small capture for a unit headbox and print the manifest.
//!
//! Shows the full flow an integration would follow: place cameras, walk the
//! render jobs in the order the renderer must follow, and emit the JSON the
//! bake tool consumes.

use headbox::{manifest_to_json, CapturePlan, DVec3, Headbox, ViewGroupConfig};

fn main() {
    env_logger::init();

    let headbox = Headbox::new(DVec3::splat(-1.0), DVec3::splat(1.0));
    let plan = CapturePlan::new(headbox, 4, ViewGroupConfig::default()).unwrap();

    println!("camera positions (center first):");
    for (index, position) in plan.positions().iter().enumerate() {
        println!("  view group {index}: {position}");
    }

    println!("\nrender jobs, in required order:");
    for job in plan.render_jobs() {
        println!(
            "  group {} {:>6}: {} / {}",
            job.group_index, job.face, job.color_path, job.depth_path
        );
    }

    let manifest = plan.build_manifest().unwrap();
    println!("\nmanifest ({} views):", manifest.view_count());
    println!("{}", manifest_to_json(&manifest).unwrap());
}
