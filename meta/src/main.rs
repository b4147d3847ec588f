fn main() {
    multiversx_sc_meta_lib::cli_main::<election_watch::AbiProvider>();
}
