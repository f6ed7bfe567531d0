pub mod trip_created_rto;
