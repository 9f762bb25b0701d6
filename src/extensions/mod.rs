//! Optional overlays folded into a built spec.
//!
//! Extensions consume a finished `RenderSpec` and never reach back into the
//! builder.

pub mod annotations;

pub use annotations::{
    AnnotationDrawTime, AnnotationKind, AnnotationLabel, AnnotationMarker, AnnotationOptions,
    AnnotationOverlay, AnnotationShape, DEFAULT_ANNOTATION_BORDER_WIDTH, DEFAULT_ANNOTATION_COLOR,
    FormattedAnnotation, LineMode,
};
