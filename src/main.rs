use canvas_life::{Session, ScreenSurface, input};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut session = Session::new();
    let mut surface = ScreenSurface;

    loop {
        // Any viewport change throws the grid away and reseeds.
        session.sync_viewport(screen_width(), screen_height());

        input::handle_pointer(&mut session);
        input::handle_keyboard(&mut session);

        session.tick(get_frame_time());

        clear_background(BLACK);
        session.render(&mut surface);

        next_frame().await;
    }
}
