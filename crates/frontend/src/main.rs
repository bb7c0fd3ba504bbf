use xray_panel_frontend::{logging, App};

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
