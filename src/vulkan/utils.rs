pub mod apiversion;
pub mod cstringstuff;
pub mod extension;
pub mod layer;
