pub mod label_encoder; // Kódovací priestor fixovaný pri trénovaní
pub mod minmax_scaler; // Škálovanie s trénovacími parametrami
pub mod normalizer; // Surové kódy na kanonické labely

pub use label_encoder::{CategoryEncoder, EncoderColumn};
pub use minmax_scaler::MinMaxScaler;
pub use normalizer::{CategoricalNormalizer, MappingError};
