// Chat-model abstraction layer

pub mod openai;
pub mod provider;

pub use openai::OpenAiChatModel;
pub use provider::ChatModel;
