fn main() {
    #[cfg(feature = "hydrate")]
    folio_web::hydrate();
}
