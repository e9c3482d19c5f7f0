fn main() {
    contact_scan_lib::run()
}
