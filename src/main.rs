fn main() {
    admin_console::start();
}
