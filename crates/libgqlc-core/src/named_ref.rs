use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [`NamedRef`] is done via [`NamedRef::deref()`] by providing an explicit
/// reference to the `TSource`.
///
/// `TSource` types are bound to implement the [`DerefByName`] trait in order
/// to execute de-referencing operations for a `TResource` given its
/// [`String`] name.
///
/// As a concrete example, [`crate::types::ObjectType`] stores its implemented
/// interfaces as named references into the
/// [`SchemaIndex`](crate::schema::SchemaIndex) rather than direct references.
/// This allows the `SchemaIndex` to own every type without self-references,
/// and it allows IR structures to be compared and stored by stable name
/// rather than by pointer identity.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation: Clone,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> Clone for NamedRef<TSource, TRefLocation, TResource> {
    fn clone(&self) -> Self {
        NamedRef {
            name: self.name.clone(),
            phantom: PhantomData,
            ref_location: self.ref_location.clone(),
        }
    }
}
impl<
    TSource,
    TRefLocation: PartialEq,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> PartialEq for NamedRef<TSource, TRefLocation, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug)]
pub enum DerefByNameError {
    DanglingReference(String),
}
