pub mod create_bus_dto;
