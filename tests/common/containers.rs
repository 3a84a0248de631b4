use testcontainers::clients::Cli;
use testcontainers::images::postgres::Postgres;
use testcontainers::Container;

/// Start all containers needed for integration tests:
/// 1. postgres
///
/// The container is returned alongside the mapped port so it doesn't get
/// dropped until the test is done with it.
pub fn start_postgres(docker: &Cli) -> (u16, Container<'_, Postgres>) {
    let container = docker.run(Postgres::default());
    let db_port = container.get_host_port_ipv4(5432);
    println!("Postgres container started on {}", db_port);

    (db_port, container)
}
