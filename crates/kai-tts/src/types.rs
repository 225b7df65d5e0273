/// Speech synthesis request handed to a provider
#[derive(Debug)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub text: String,
    /// Voice identifier (an `ElevenLabs` voice ID or an `OpenAI` voice name)
    pub voice: String,
    /// Synthesis model (e.g. "`eleven_multilingual_v2`" or "tts-1")
    pub model: String,
}

/// Raw audio response from a synthesis provider
#[derive(Debug)]
pub struct SpeechAudio {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
