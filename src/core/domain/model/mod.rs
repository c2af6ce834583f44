pub mod probe_connection;
