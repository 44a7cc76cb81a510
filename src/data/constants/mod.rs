/// Byte alphabets used to build the packing tables.
pub(crate) mod alphas;
/// Byte to 2-bit code mappings shared by packing and the distance kernels.
pub(crate) mod mappings;
