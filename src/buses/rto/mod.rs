pub mod bus_created_rto;
