mod about;
mod app;
mod contact_form;
mod gallery_view;
mod nav;
mod net;

fn main() {
    app::run();
}
