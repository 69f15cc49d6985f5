use super::*;

fn size(w: u32, h: u32) -> Size {
    Size::new(w, h).unwrap()
}

#[test]
fn ops_run_in_order() {
    let red = Rgb8::new(200, 0, 0);
    let blue = Rgb8::new(0, 0, 200);
    let mut plan = LayerPlan::new(size(4, 4));
    plan.push(DrawOp::Dot {
        at: Point::new(1.0, 1.0),
        paint: Paint::new(red, 255),
    });
    plan.push(DrawOp::Dot {
        at: Point::new(1.9, 1.2),
        paint: Paint::new(blue, 255),
    });
    let canvas = rasterize(&plan).unwrap();
    assert_eq!(canvas.pixel(1, 1), Some([0, 0, 200, 255]));
    assert_eq!(canvas.pixel(2, 1), Some([0, 0, 0, 0]));
}

#[test]
fn gradient_then_vignette_matches_direct_calls() {
    let top = Rgb8::new(24, 14, 9);
    let bottom = Rgb8::new(84, 40, 28);
    let vignette = VignetteParams::with_strength(0.5);

    let mut direct = Canvas::new(32, 18).unwrap();
    fill_gradient(&mut direct, top, bottom);
    add_vignette(&mut direct, &vignette);

    let mut plan = LayerPlan::new(size(32, 18));
    plan.push(DrawOp::Gradient { top, bottom });
    plan.push(DrawOp::Vignette(vignette));
    assert_eq!(rasterize(&plan).unwrap(), direct);
}

#[test]
fn size_mismatch_is_rejected() {
    let plan = LayerPlan::new(size(8, 8));
    let mut canvas = Canvas::new(4, 4).unwrap();
    let err = execute_plan(&mut canvas, &plan).unwrap_err();
    assert!(matches!(err, FrescoError::Validation(_)));
}

#[test]
fn empty_plan_leaves_canvas_transparent() {
    let canvas = rasterize(&LayerPlan::new(size(3, 2))).unwrap();
    assert!(canvas.as_rgba8().iter().all(|&b| b == 0));
}
