use frontend::{config, App};
use yew::Renderer;

fn main() {
    // Route `log` output to the browser console
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));

    Renderer::<App>::new().render();
}
