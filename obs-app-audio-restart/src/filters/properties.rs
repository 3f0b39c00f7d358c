use crate::{
    enums::{ObsTextInfoType, ObsTextType},
    utils::{S_DESCRIPTION, TEXT_LONG_DESCRIPTION},
};

/// A text field of the filter's property panel (`obs_properties_add_text`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsTextProperty {
    name: String,
    description: Option<String>,
    text_type: ObsTextType,
    long_description: Option<String>,
    info_type: ObsTextInfoType,
    word_wrap: bool,
}

impl ObsTextProperty {
    pub fn new(name: impl Into<String>, description: Option<String>, text_type: ObsTextType) -> Self {
        Self {
            name: name.into(),
            description,
            text_type,
            long_description: None,
            info_type: ObsTextInfoType::Normal,
            word_wrap: false,
        }
    }

    pub fn set_long_description(&mut self, long_description: impl Into<String>) -> &mut Self {
        self.long_description = Some(long_description.into());
        self
    }

    pub fn set_info_type(&mut self, info_type: ObsTextInfoType) -> &mut Self {
        self.info_type = info_type;
        self
    }

    pub fn set_info_word_wrap(&mut self, word_wrap: bool) -> &mut Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn text_type(&self) -> ObsTextType {
        self.text_type
    }

    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    pub fn info_type(&self) -> ObsTextInfoType {
        self.info_type
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObsProperty {
    Text(ObsTextProperty),
}

/// The property panel of a source, in the order the host should render it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObsProperties {
    properties: Vec<ObsProperty>,
}

impl ObsProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        text_type: ObsTextType,
    ) -> &mut ObsTextProperty {
        let index = self.properties.len();
        self.properties
            .push(ObsProperty::Text(ObsTextProperty::new(name, description, text_type)));

        let ObsProperty::Text(text) = &mut self.properties[index];
        text
    }

    pub fn get(&self, name: &str) -> Option<&ObsProperty> {
        self.properties.iter().find(|p| match p {
            ObsProperty::Text(text) => text.name() == name,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObsProperty> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// The read-only description panel. The filter has no configurable options.
pub fn filter_properties() -> ObsProperties {
    let mut props = ObsProperties::new();
    props
        .add_text(S_DESCRIPTION, None, ObsTextType::Info)
        .set_long_description(TEXT_LONG_DESCRIPTION)
        .set_info_type(ObsTextInfoType::Normal)
        .set_info_word_wrap(true);

    props
}
