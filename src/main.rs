use std::{cell::RefCell, f64::consts::TAU, rc::Rc};

use anyhow::{Context, Result};
use clap::Parser;
use gtk::{cairo, glib, prelude::*};
use metaballs::{Config, Scene};
use tracing::level_filters;
use tracing_subscriber::{
    Layer, layer::SubscriberExt, util::SubscriberInitExt,
};

const APP_ID: &str = "com.nelsonearle.metaballs.draw";

fn main() -> Result<()> {
    let config = Config::parse();

    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level_filters::LevelFilter::INFO.into())
        .from_env_lossy();

    let tracy_layer = tracing_tracy::TracyLayer::default();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(env_filter))
        .with(tracy_layer)
        .init();

    config.validate().context("invalid configuration")?;
    tracing::info!(?config, "starting");

    let app = gtk::Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| eat_err(cb_activate(app, &config)));

    // GTK must not see our own flags
    let exit_code = app.run_with_args(&[] as &[&str]);
    if exit_code != glib::ExitCode::SUCCESS {
        eprintln!("{exit_code:?}");
    }

    Ok(())
}

fn eat_err(r: Result<()>) {
    if let Err(err) = r {
        glib::g_error!("metaballs.draw", "{err:#}");
    }
}

fn cb_activate(app: &gtk::Application, config: &Config) -> Result<()> {
    let scene = Rc::new(RefCell::new(Scene::new(config)?));

    let size = (config.domain_size.ceil() as i32).saturating_add(1);

    // Drawing Area

    let drawing_area = gtk::DrawingArea::builder()
        .content_width(size)
        .content_height(size)
        .build();

    // Window

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Metaballs")
        .default_width(size)
        .default_height(size)
        .resizable(false)
        .child(&drawing_area)
        .build();

    // Draw

    drawing_area.set_draw_func(glib::clone!(
        #[strong]
        scene,
        move |widget, ctx, w, h| {
            eat_err(draw(widget, ctx, w, h, &mut scene.borrow_mut()))
        }
    ));

    // Frame Timer

    glib::timeout_add_local(
        config.frame_interval(),
        glib::clone!(
            #[strong]
            scene,
            #[weak]
            drawing_area,
            #[upgrade_or]
            glib::ControlFlow::Break,
            move || {
                scene.borrow_mut().step();
                drawing_area.queue_draw();
                glib::ControlFlow::Continue
            }
        ),
    );

    // Present

    window.present();

    Ok(())
}

mod colors {
    use gtk::gdk::RGBA;

    const fn f(b: u8) -> f32 {
        b as f32 / u8::MAX as f32
    }

    pub(crate) static BG: RGBA = RGBA::new(0.2, 0.2, 0.2, 1.);
    pub(crate) static CONTOUR: RGBA = RGBA::new(f(0xff), f(0x00), f(0x00), 1.);
    pub(crate) static SOURCE_FILL: RGBA = RGBA::new(1., 1., 1., 1.);
    pub(crate) static SOURCE_STROKE: RGBA = RGBA::new(0., 0., 0., 1.);
}

mod sizes {
    pub(crate) static LINE_WIDTH: f64 = 1.;
}

fn draw(
    _widget: &gtk::DrawingArea,
    ctx: &cairo::Context,
    width: i32,
    height: i32,
    scene: &mut Scene,
) -> Result<()> {
    ctx.set_source_color(&colors::BG);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    ctx.fill()?;

    ctx.set_line_width(sizes::LINE_WIDTH);

    ctx.set_source_color(&colors::CONTOUR);
    for s in scene.contour() {
        ctx.move_to(s.a.x, s.a.y);
        ctx.line_to(s.b.x, s.b.y);
    }
    ctx.stroke()?;

    for source in scene.sources() {
        ctx.new_sub_path();
        ctx.arc(source.pos.x, source.pos.y, source.radius, 0., TAU);
    }
    ctx.set_source_color(&colors::SOURCE_FILL);
    ctx.fill_preserve()?;
    ctx.set_source_color(&colors::SOURCE_STROKE);
    ctx.stroke()?;

    if let Some(client) = tracy_client::Client::running() {
        client.frame_mark();
    }

    Ok(())
}
