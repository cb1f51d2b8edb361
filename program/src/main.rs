use sum_native::sum_fixed;

fn main() {
    // The exit status is the result surface.
    std::process::exit(sum_fixed() as i32);
}
