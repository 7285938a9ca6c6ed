use mimalloc::MiMalloc;
use site::SiteApp;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(target: "vitrine", "starting showcase shell");
    platform::run(SiteApp::new());
}
