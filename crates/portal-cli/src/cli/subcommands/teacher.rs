use clap::{Args, Subcommand};

/// Actions on the teacher course page.
#[derive(Clone, Debug, Subcommand)]
pub enum TeacherCommands {
    /// Generate a quiz from a module.
    GenerateQuiz { module_name: String },
    /// Replace a module's slides link.
    AddPpt(LinkArgs),
    /// Replace a module's audio link.
    AddAudio(LinkArgs),
    /// Replace a module's quiz link.
    UploadQuizLink(LinkArgs),
    /// Create a course owned by the logged-in teacher.
    AddCourse {
        #[arg(long)]
        course_id: String,
        #[arg(long)]
        course_name: String,
    },
    /// Create a module in a course.
    AddModule {
        #[arg(long)]
        course_id: String,
        #[arg(long)]
        module_name: String,
        #[arg(long, default_value = "")]
        ppt_link: String,
        #[arg(long, default_value = "")]
        audio_link: String,
    },
    /// Show one course.
    CourseDetails { course_id: String },
    /// Extract the text of a presentation.
    ConvertPpt { ppt_link: String },
}

#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    pub module_name: String,
    pub link: String,
    /// Expand this course first so the updated module is listed.
    #[arg(long, value_name = "COURSE_ID")]
    pub course: Option<String>,
}
