use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dev_portfolio::math::Ray;
use dev_portfolio::page::PageLayout;
use dev_portfolio::render::SoftwareBackend;
use dev_portfolio::scene::{
    accent_specs, intersect_shape, DeviceProfile, SceneConfig, SceneController, SurfaceBox,
};
use dev_portfolio::scroll::closest_section;
use glam::Vec3;

/// Attached controller drawing into a `width` x `height` logical surface
fn attached(width: f32, height: f32, render_scale: f32) -> SceneController<SoftwareBackend> {
    let mut scene = SceneController::new(SoftwareBackend::new(render_scale), SceneConfig::default());
    scene.attach(SurfaceBox::new(0.0, 0.0, width, height));
    scene
}

/// Benchmark: one full frame (ease camera, spin meshes, ray-march every pixel)
fn bench_scene_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");
    group.sample_size(20);

    for &(width, height) in &[(640.0, 360.0), (1280.0, 720.0)] {
        for &scale in &[0.25f32, 0.5] {
            let mut scene = attached(width, height, scale);
            let id = format!("{}x{}@{}", width, height, scale);
            group.bench_function(BenchmarkId::from_parameter(id), |b| {
                b.iter(|| black_box(scene.frame()))
            });
        }
    }

    group.finish();
}

/// Benchmark: hover picking under the pointer
fn bench_pointer_pick(c: &mut Criterion) {
    let mut scene = attached(1280.0, 720.0, 0.25);
    let surface = SurfaceBox::new(0.0, 0.0, 1280.0, 720.0);

    c.bench_function("pointer_move_hit", |b| {
        b.iter(|| black_box(scene.pointer_move(black_box(640.0), black_box(360.0), &surface)))
    });

    c.bench_function("pointer_move_miss", |b| {
        b.iter(|| black_box(scene.pointer_move(black_box(10.0), black_box(10.0), &surface)))
    });
}

/// Benchmark: torus ray march, the most expensive shape
fn bench_torus_march(c: &mut Criterion) {
    let torus = accent_specs(&DeviceProfile::desktop())[2].shape;
    let hit = Ray::new(Vec3::new(0.5, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    let miss = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let mut group = c.benchmark_group("torus_march");
    for &steps in &[48u32, 96] {
        group.bench_with_input(BenchmarkId::new("hit", steps), &steps, |b, &steps| {
            b.iter(|| black_box(intersect_shape(&torus, black_box(&hit), steps)))
        });
        group.bench_with_input(BenchmarkId::new("hole", steps), &steps, |b, &steps| {
            b.iter(|| black_box(intersect_shape(&torus, black_box(&miss), steps)))
        });
    }
    group.finish();
}

/// Benchmark: active-section computation over a mounted page
fn bench_closest_section(c: &mut Criterion) {
    let mut page = PageLayout::stacked(800.0, &[800.0, 1200.0, 1600.0, 1400.0, 900.0, 700.0]);
    page.set_scroll_top(2500.0);

    c.bench_function("closest_section", |b| {
        b.iter(|| black_box(closest_section(black_box(&page))))
    });
}

criterion_group!(
    benches,
    bench_scene_frame,
    bench_pointer_pick,
    bench_torus_march,
    bench_closest_section
);
criterion_main!(benches);
